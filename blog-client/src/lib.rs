//! Клиентская библиотека для чтения blog-server по HTTP.
//!
//! `BlogClient` отдаёт контексты страниц сайта (главная, пост, тег, контакты)
//! и админские списки в виде типизированных моделей.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{BlogClientError, BlogClientResult};
pub use models::{
    AdminComment, AdminList, AdminPost, AdminTag, Comment, ContactsPage, IndexPage, PostCard,
    PostDetail, PostPage, Tag, TagPage,
};

use http_client::HttpClient;

#[derive(Debug, Clone)]
/// Клиент для страниц и админских списков блога.
pub struct BlogClient {
    base_url: String,
    http_client: HttpClient,
}

impl BlogClient {
    /// Создаёт клиент для сервера, например `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> BlogClientResult<Self> {
        let base_url = base_url.into();
        let http_client = HttpClient::new(&base_url)?;
        Ok(Self {
            base_url,
            http_client,
        })
    }

    /// Адрес сервера, с которым работает клиент.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Главная страница: популярные и свежие посты, популярные теги.
    pub async fn index(&self) -> BlogClientResult<IndexPage> {
        self.http_client.index().await
    }

    /// Пост по slug с комментариями.
    ///
    /// Возвращает `BlogClientError::NotFound`, если поста нет.
    pub async fn post(&self, slug: &str) -> BlogClientResult<PostPage> {
        self.http_client.post(slug).await
    }

    /// Посты с тегом (не больше 20).
    ///
    /// Возвращает `BlogClientError::NotFound`, если тега нет.
    pub async fn tag(&self, title: &str) -> BlogClientResult<TagPage> {
        self.http_client.tag(title).await
    }

    /// Страница контактов.
    pub async fn contacts(&self) -> BlogClientResult<ContactsPage> {
        self.http_client.contacts().await
    }

    /// Админский список постов со счётчиками лайков и комментариев.
    ///
    /// Работает только если на сервере включён `ADMIN_ENABLED`.
    pub async fn admin_posts(&self, limit: u32, offset: u32) -> BlogClientResult<AdminList<AdminPost>> {
        self.http_client.admin_posts(limit, offset).await
    }

    /// Админский список тегов со счётчиком постов.
    pub async fn admin_tags(&self, limit: u32, offset: u32) -> BlogClientResult<AdminList<AdminTag>> {
        self.http_client.admin_tags(limit, offset).await
    }

    /// Админский список комментариев.
    pub async fn admin_comments(
        &self,
        limit: u32,
        offset: u32,
    ) -> BlogClientResult<AdminList<AdminComment>> {
        self.http_client.admin_comments(limit, offset).await
    }
}
