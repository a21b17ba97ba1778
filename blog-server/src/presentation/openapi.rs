use utoipa::OpenApi;

use crate::presentation::handlers::admin::{
    AdminCommentDto, AdminCommentsResponseDto, AdminPostDto, AdminPostsResponseDto, AdminTagDto,
    AdminTagsResponseDto, PaginationQuery,
};
use crate::presentation::handlers::pages::{
    CommentDto, ContactsContextDto, IndexContextDto, PostCardDto, PostDetailContextDto,
    PostDetailDto, TagDto, TagFilterContextDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::pages::index,
        crate::presentation::handlers::pages::post_detail,
        crate::presentation::handlers::pages::tag_filter,
        crate::presentation::handlers::pages::contacts,
        crate::presentation::handlers::admin::list_posts,
        crate::presentation::handlers::admin::list_tags,
        crate::presentation::handlers::admin::list_comments
    ),
    components(
        schemas(
            TagDto,
            PostCardDto,
            CommentDto,
            PostDetailDto,
            IndexContextDto,
            PostDetailContextDto,
            TagFilterContextDto,
            ContactsContextDto,
            PaginationQuery,
            AdminPostDto,
            AdminTagDto,
            AdminCommentDto,
            AdminPostsResponseDto,
            AdminTagsResponseDto,
            AdminCommentsResponseDto
        )
    ),
    tags(
        (name = "pages", description = "Blog page contexts"),
        (name = "admin", description = "Read-only admin lists")
    )
)]
pub(crate) struct ApiDoc;
