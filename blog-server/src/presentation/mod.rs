use std::sync::Arc;

use crate::application::admin_service::AdminService;
use crate::application::blog_service::BlogService;
use crate::data::comment_repository::CommentRepository;
use crate::data::post_repository::PostRepository;
use crate::data::tag_repository::TagRepository;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

pub(crate) type SharedPostRepository = Arc<dyn PostRepository>;
pub(crate) type SharedTagRepository = Arc<dyn TagRepository>;
pub(crate) type SharedCommentRepository = Arc<dyn CommentRepository>;

pub(crate) type SiteBlogService =
    BlogService<SharedPostRepository, SharedTagRepository, SharedCommentRepository>;
pub(crate) type SiteAdminService =
    AdminService<SharedPostRepository, SharedTagRepository, SharedCommentRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) blog_service: Arc<SiteBlogService>,
    pub(crate) admin_service: Arc<SiteAdminService>,
    pub(crate) media_url: Arc<str>,
}

impl AppState {
    pub(crate) fn new(
        posts: SharedPostRepository,
        tags: SharedTagRepository,
        comments: SharedCommentRepository,
        media_url: &str,
    ) -> Self {
        let blog_service = BlogService::new(posts.clone(), tags.clone(), comments.clone());
        let admin_service = AdminService::new(posts, tags, comments);

        Self {
            blog_service: Arc::new(blog_service),
            admin_service: Arc::new(admin_service),
            media_url: Arc::from(media_url),
        }
    }
}
