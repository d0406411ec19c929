mod impl_file_storage;
