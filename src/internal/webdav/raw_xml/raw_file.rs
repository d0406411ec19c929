use serde::{Deserialize, Serialize};

/// 对应 WebDAV 响应 XML 顶层的 `<d:multistatus>` 节点
///
/// quick-xml 反序列化时忽略命名空间前缀，所以 `d:`、`D:` 等写法都能匹配。
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct MultiStatus {
    /// `<d:response>` 节点列表，每个 response 表示一个资源（文件或目录）
    #[serde(rename = "response", default)]
    pub responses: Vec<Response>,
}

/// 对应单个 `<d:response>` 节点
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Response {
    /// `<d:href>`：资源路径（URL 编码，需要解码才能显示原始文件名）
    pub href: String,
    /// `<d:propstat>`：资源属性集和对应状态码的列表
    #[serde(rename = "propstat", default)]
    pub propstats: Vec<PropStat>,
}

/// 对应 `<d:propstat>` 节点：一个属性集 + 对应的 HTTP 状态
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct PropStat {
    /// `<d:prop>`：资源的具体属性
    pub prop: Prop,
    /// `<d:status>`：该属性集对应的 HTTP 状态，如 "HTTP/1.1 200 OK"
    #[serde(default)]
    pub status: String,
}

/// 对应 `<d:prop>` 节点，只包含列目录时请求的几个属性
///
/// 数值与时间都按原始字符串接收，由上层决定如何容错。
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Prop {
    /// `<resourcetype>`：资源类型（文件/目录）
    #[serde(rename = "resourcetype")]
    pub resource_type: Option<ResourceType>,

    /// `<getcontentlength>`：文件大小（字节），目录一般没有此字段
    #[serde(rename = "getcontentlength")]
    pub content_length: Option<String>,

    /// `<getlastmodified>`：最后修改时间（HTTP-date 格式，原样保留）
    #[serde(rename = "getlastmodified")]
    pub last_modified: Option<String>,

    /// `<getcontenttype>`：MIME 类型（如 "text/plain" 或 "application/pdf"）
    #[serde(rename = "getcontenttype")]
    pub content_type: Option<String>,

    /// `<displayname>`：显示名（用户友好的文件/目录名）
    #[serde(rename = "displayname")]
    pub display_name: Option<String>,
}

/// `<resourcetype>` 节点
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ResourceType {
    /// `<collection/>` 存在表示是目录，否则是文件
    #[serde(rename = "collection")]
    pub is_collection: Option<EmptyElement>,
}

/// 空元素的占位结构，例如 `<collection/>`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmptyElement {}
