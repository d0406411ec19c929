use reqwest::Method;

/// reqwest 未内置的 WebDAV 方法
pub enum WebDavMethod {
    PROPFIND,
    MKCOL,
    MOVE,
    COPY,
}

impl WebDavMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebDavMethod::PROPFIND => "PROPFIND",
            WebDavMethod::MKCOL => "MKCOL",
            WebDavMethod::MOVE => "MOVE",
            WebDavMethod::COPY => "COPY",
        }
    }

    pub fn to_head_method(&self) -> Result<Method, String> {
        Method::from_bytes(self.as_str().as_bytes()).map_err(|e| e.to_string())
    }
}

/// PROPFIND 深度，列目录只需要直接子项
pub enum Depth {
    One,
}

impl Depth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Depth::One => "1",
        }
    }
}
