use std::collections::HashMap;

use crate::data::comment_repository::CommentRepository;
use crate::data::post_repository::PostRepository;
use crate::data::tag_repository::TagRepository;
use crate::domain::comment::CommentView;
use crate::domain::error::DomainError;
use crate::domain::post::PostSummary;
use crate::domain::tag::{Tag, TagStats};

pub(crate) const POPULAR_POSTS_LIMIT: i64 = 5;
pub(crate) const FRESH_POSTS_LIMIT: i64 = 5;
pub(crate) const POPULAR_TAGS_LIMIT: i64 = 5;
pub(crate) const TAG_POSTS_LIMIT: i64 = 20;

/// Пост для карточки в списке: счётчик комментариев и теги уже подгружены.
#[derive(Debug, Clone)]
pub(crate) struct PostCard {
    pub(crate) summary: PostSummary,
    pub(crate) comments_count: i64,
    pub(crate) tags: Vec<TagStats>,
}

#[derive(Debug, Clone)]
pub(crate) struct IndexPage {
    pub(crate) most_popular_posts: Vec<PostCard>,
    pub(crate) page_posts: Vec<PostCard>,
    pub(crate) popular_tags: Vec<TagStats>,
}

#[derive(Debug, Clone)]
pub(crate) struct PostDetailPage {
    pub(crate) post: PostSummary,
    pub(crate) comments: Vec<CommentView>,
    pub(crate) tags: Vec<TagStats>,
    pub(crate) popular_tags: Vec<TagStats>,
    pub(crate) most_popular_posts: Vec<PostCard>,
}

#[derive(Debug, Clone)]
pub(crate) struct TagFilterPage {
    pub(crate) tag: Tag,
    pub(crate) posts: Vec<PostCard>,
    pub(crate) popular_tags: Vec<TagStats>,
    pub(crate) most_popular_posts: Vec<PostCard>,
}

struct Relations {
    comments: HashMap<i64, i64>,
    tags: HashMap<i64, Vec<TagStats>>,
}

impl Relations {
    fn card(&self, summary: PostSummary) -> PostCard {
        let id = summary.post.id;
        PostCard {
            comments_count: self.comments.get(&id).copied().unwrap_or(0),
            tags: self.tags.get(&id).cloned().unwrap_or_default(),
            summary,
        }
    }

    fn cards(&self, summaries: Vec<PostSummary>) -> Vec<PostCard> {
        summaries
            .into_iter()
            .map(|summary| self.card(summary))
            .collect()
    }
}

pub(crate) struct BlogService<P, T, C>
where
    P: PostRepository,
    T: TagRepository,
    C: CommentRepository,
{
    posts: P,
    tags: T,
    comments: C,
}

impl<P, T, C> BlogService<P, T, C>
where
    P: PostRepository,
    T: TagRepository,
    C: CommentRepository,
{
    pub(crate) fn new(posts: P, tags: T, comments: C) -> Self {
        Self {
            posts,
            tags,
            comments,
        }
    }

    pub(crate) async fn index(&self) -> Result<IndexPage, DomainError> {
        let most_popular = self.posts.most_liked(POPULAR_POSTS_LIMIT).await?;
        let most_fresh = self.posts.most_recent(FRESH_POSTS_LIMIT).await?;
        let popular_tags = self.tags.popular(POPULAR_TAGS_LIMIT).await?;

        let relations = self
            .load_relations(most_popular.iter().chain(most_fresh.iter()))
            .await?;

        Ok(IndexPage {
            most_popular_posts: relations.cards(most_popular),
            page_posts: relations.cards(most_fresh),
            popular_tags,
        })
    }

    pub(crate) async fn post_detail(&self, slug: &str) -> Result<PostDetailPage, DomainError> {
        let post = self
            .posts
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post slug: {slug}")))?;

        let comments = self.comments.list_for_post(post.post.id).await?;
        let popular_tags = self.tags.popular(POPULAR_TAGS_LIMIT).await?;
        let most_popular = self.posts.most_liked(POPULAR_POSTS_LIMIT).await?;

        let relations = self
            .load_relations(std::iter::once(&post).chain(most_popular.iter()))
            .await?;
        let tags = relations
            .tags
            .get(&post.post.id)
            .cloned()
            .unwrap_or_default();

        Ok(PostDetailPage {
            post,
            comments,
            tags,
            popular_tags,
            most_popular_posts: relations.cards(most_popular),
        })
    }

    pub(crate) async fn tag_filter(&self, title: &str) -> Result<TagFilterPage, DomainError> {
        let tag = self
            .tags
            .find_by_title(title)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("tag title: {title}")))?;

        let posts = self.posts.list_by_tag(tag.id, TAG_POSTS_LIMIT).await?;
        let popular_tags = self.tags.popular(POPULAR_TAGS_LIMIT).await?;
        let most_popular = self.posts.most_liked(POPULAR_POSTS_LIMIT).await?;

        let relations = self
            .load_relations(posts.iter().chain(most_popular.iter()))
            .await?;

        Ok(TagFilterPage {
            tag,
            posts: relations.cards(posts),
            popular_tags,
            most_popular_posts: relations.cards(most_popular),
        })
    }

    /// Один запрос за счётчиками комментариев и один за тегами на всю страницу.
    async fn load_relations<'a>(
        &self,
        summaries: impl Iterator<Item = &'a PostSummary>,
    ) -> Result<Relations, DomainError> {
        let mut ids: Vec<i64> = summaries.map(|summary| summary.post.id).collect();
        ids.sort_unstable();
        ids.dedup();

        let comments = self.comments.counts_for_posts(&ids).await?;
        let tags = self.tags.tags_for_posts(&ids).await?;

        Ok(Relations { comments, tags })
    }
}
