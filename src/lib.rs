/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口
pub use internal::entrance::remote::*;

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::nextcloud_auth::NextcloudAuth;
}

pub mod config {
    use crate::internal;
    pub use internal::config::structs::nextcloud_config::*;
}

pub mod error {
    use crate::internal;
    pub use internal::error::*;
}

/// 路径拼接：相对路径 → 远端路径 → WebDAV / OCS 地址
pub mod path {
    use crate::internal;
    pub use internal::path::functions::dav_url::*;
    pub use internal::path::functions::resolve_remote_path::*;
}

/// 对外提供webdav基础访问能力，不能限制死在入口中，以防有人自己要用
pub mod webdav {
    pub mod functions {
        use crate::internal;
        pub use internal::webdav::functions::get_folders_raw_data::*;
    }

    pub mod enums {
        use crate::internal;
        pub use internal::webdav::enums::*;
    }

    pub mod status {
        use crate::internal;
        pub use internal::webdav::status::*;
    }

    pub mod traits {
        pub use crate::internal::webdav::raw_xml::impl_multi_status::*;
    }

    pub mod structs {
        pub use crate::internal::webdav::raw_xml::raw_file::*;
    }
}

pub mod ocs {
    use crate::internal;
    pub use internal::ocs::enums::*;
    pub use internal::ocs::functions::create_public_share::resolve_share_response;
    pub use internal::ocs::raw_json::ocs_envelope::*;
}

pub mod remote_file {
    use crate::internal;
    pub use internal::remote_file::structs::directory_entry::*;
    pub use internal::remote_file::structs::remote_file_content::*;
}

pub mod storage {
    use crate::internal;
    pub use internal::entrance::traits::file_storage::*;
}
