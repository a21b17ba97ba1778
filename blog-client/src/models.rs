use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Тег со счётчиком помеченных им постов.
pub struct Tag {
    /// Название тега.
    pub title: String,
    /// Сколько постов помечено тегом.
    pub posts_with_tag: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Карточка поста в списках.
pub struct PostCard {
    /// Заголовок.
    pub title: String,
    /// Первые 200 символов текста.
    pub teaser_text: String,
    /// Имя автора.
    pub author: String,
    /// Число комментариев.
    pub comments_amount: i64,
    /// URL картинки, если она есть.
    pub image_url: Option<String>,
    /// Дата публикации (UTC).
    pub published_at: DateTime<Utc>,
    /// Slug поста.
    pub slug: String,
    /// Теги поста.
    pub tags: Vec<Tag>,
    /// Название первого тега.
    pub first_tag_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Комментарий к посту.
pub struct Comment {
    /// Текст.
    pub text: String,
    /// Дата публикации (UTC).
    pub published_at: DateTime<Utc>,
    /// Имя автора.
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Полный пост со списком комментариев.
pub struct PostDetail {
    /// Заголовок.
    pub title: String,
    /// Полный текст.
    pub text: String,
    /// Имя автора.
    pub author: String,
    /// Комментарии в порядке публикации.
    pub comments: Vec<Comment>,
    /// Число лайков.
    pub likes_amount: i64,
    /// URL картинки, если она есть.
    pub image_url: Option<String>,
    /// Дата публикации (UTC).
    pub published_at: DateTime<Utc>,
    /// Slug поста.
    pub slug: String,
    /// Теги поста.
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Главная страница.
pub struct IndexPage {
    /// Самые залайканные посты.
    pub most_popular_posts: Vec<PostCard>,
    /// Самые свежие посты.
    pub page_posts: Vec<PostCard>,
    /// Популярные теги.
    pub popular_tags: Vec<Tag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Страница поста.
pub struct PostPage {
    /// Сам пост.
    pub post: PostDetail,
    /// Популярные теги.
    pub popular_tags: Vec<Tag>,
    /// Самые залайканные посты.
    pub most_popular_posts: Vec<PostCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Посты с заданным тегом.
pub struct TagPage {
    /// Название тега.
    pub tag: String,
    /// Популярные теги.
    pub popular_tags: Vec<Tag>,
    /// Посты с тегом, не больше 20.
    pub posts: Vec<PostCard>,
    /// Самые залайканные посты.
    pub most_popular_posts: Vec<PostCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Страница контактов: статическая, контекст пуст.
pub struct ContactsPage {}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Строка админского списка постов.
pub struct AdminPost {
    /// Заголовок.
    pub title: String,
    /// Имя автора.
    pub author: String,
    /// Дата публикации (UTC).
    pub published_at: DateTime<Utc>,
    /// Число лайков.
    pub likes_count: i64,
    /// Число комментариев.
    pub comments_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Строка админского списка тегов.
pub struct AdminTag {
    /// Название.
    pub title: String,
    /// Число постов с тегом.
    pub posts_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Строка админского списка комментариев.
pub struct AdminComment {
    /// Текст.
    pub text: String,
    /// Заголовок поста.
    pub post: String,
    /// Slug поста.
    pub post_slug: String,
    /// Имя автора.
    pub author: String,
    /// Дата публикации (UTC).
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Страница админского списка.
pub struct AdminList<T> {
    /// Элементы текущей страницы.
    pub items: Vec<T>,
    /// Размер страницы.
    pub limit: u32,
    /// Смещение от начала выборки.
    pub offset: u32,
    /// Общее количество элементов.
    pub total: u64,
}
