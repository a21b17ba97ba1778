use reqwest::{Client, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::error::{BlogClientError, BlogClientResult};
use crate::models::{
    AdminComment, AdminList, AdminPost, AdminTag, ContactsPage, IndexPage, PostPage, TagPage,
};

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AdminListDto<T> {
    items: Vec<T>,
    limit: u32,
    offset: u32,
    total: i64,
}

#[derive(Serialize)]
struct AdminListQuery {
    limit: u32,
    offset: u32,
}

impl<T> From<AdminListDto<T>> for AdminList<T> {
    fn from(value: AdminListDto<T>) -> Self {
        Self {
            items: value.items,
            limit: value.limit,
            offset: value.offset,
            total: value.total.max(0) as u64,
        }
    }
}

#[derive(Debug, Clone)]
/// HTTP-клиент для страниц и админских списков `blog-server`.
pub struct HttpClient {
    base_url: Url,
    client: Client,
}

impl HttpClient {
    /// Создаёт клиент с базовым URL сервера, например `http://127.0.0.1:8080`.
    pub fn new(base_url: &str) -> BlogClientResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| BlogClientError::InvalidRequest(format!("invalid base url: {err}")))?;
        if base_url.cannot_be_a_base() {
            return Err(BlogClientError::InvalidRequest(format!(
                "base url cannot have a path: {base_url}"
            )));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Собирает URL страницы из сегментов пути, экранируя каждый из них.
    /// Страницы сайта всегда заканчиваются на `/`.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(segments);
            path.push("");
        }
        url
    }

    async fn decode_error(response: reqwest::Response) -> BlogClientError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body
                .error
                .unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        BlogClientError::from_http_status(status, Some(message))
    }

    async fn get_json<TRes, TQuery>(&self, url: Url, query: Option<&TQuery>) -> BlogClientResult<TRes>
    where
        TRes: DeserializeOwned,
        TQuery: Serialize,
    {
        let mut request = self.client.get(url);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(BlogClientError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(BlogClientError::from_reqwest)
    }

    async fn get_page<TRes: DeserializeOwned>(&self, segments: &[&str]) -> BlogClientResult<TRes> {
        self.get_json::<TRes, ()>(self.endpoint(segments), None).await
    }

    async fn get_admin_list<T: DeserializeOwned>(
        &self,
        section: &str,
        limit: u32,
        offset: u32,
    ) -> BlogClientResult<AdminList<T>> {
        let query = AdminListQuery { limit, offset };
        let dto: AdminListDto<T> = self
            .get_json(self.endpoint(&["admin", section]), Some(&query))
            .await?;
        Ok(dto.into())
    }

    /// Главная страница.
    pub async fn index(&self) -> BlogClientResult<IndexPage> {
        self.get_page(&[]).await
    }

    /// Страница поста по slug.
    pub async fn post(&self, slug: &str) -> BlogClientResult<PostPage> {
        self.get_page(&["posts", slug]).await
    }

    /// Посты с тегом.
    pub async fn tag(&self, title: &str) -> BlogClientResult<TagPage> {
        self.get_page(&["tags", title]).await
    }

    /// Страница контактов.
    pub async fn contacts(&self) -> BlogClientResult<ContactsPage> {
        self.get_page(&["contacts"]).await
    }

    /// Админский список постов.
    pub async fn admin_posts(&self, limit: u32, offset: u32) -> BlogClientResult<AdminList<AdminPost>> {
        self.get_admin_list("posts", limit, offset).await
    }

    /// Админский список тегов.
    pub async fn admin_tags(&self, limit: u32, offset: u32) -> BlogClientResult<AdminList<AdminTag>> {
        self.get_admin_list("tags", limit, offset).await
    }

    /// Админский список комментариев.
    pub async fn admin_comments(
        &self,
        limit: u32,
        offset: u32,
    ) -> BlogClientResult<AdminList<AdminComment>> {
        self.get_admin_list("comments", limit, offset).await
    }
}
