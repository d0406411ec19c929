/// OCS 分享类型（只列出本库会用到的）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareType {
    /// 公开链接
    PublicLink,
}

impl ShareType {
    pub fn code(&self) -> u8 {
        match self {
            ShareType::PublicLink => 3,
        }
    }
}

/// OCS 分享权限位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePermission {
    /// 只读
    Read,
}

impl SharePermission {
    pub fn bits(&self) -> u8 {
        match self {
            SharePermission::Read => 1,
        }
    }
}
