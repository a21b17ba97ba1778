pub(crate) mod admin_service;
pub(crate) mod blog_service;
