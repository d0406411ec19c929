pub mod ocs_envelope;
