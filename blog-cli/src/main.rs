use std::process;

use anyhow::{Result, anyhow};
use blog_client::{
    AdminComment, AdminList, AdminPost, AdminTag, BlogClient, BlogClientError, IndexPage,
    PostCard, PostPage, Tag, TagPage,
};
use clap::{Args, Parser, Subcommand};

const DEFAULT_HTTP_SERVER: &str = "http://127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "blog-cli", version, about = "CLI для чтения blog-server")]
struct Cli {
    /// Адрес сервера.
    #[arg(long, global = true, env = "BLOG_HTTP_URL")]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Главная страница: популярные и свежие посты.
    Index,
    /// Пост с комментариями.
    Post {
        #[arg(long)]
        slug: String,
    },
    /// Посты с тегом.
    Tag {
        #[arg(long)]
        title: String,
    },
    /// Страница контактов.
    Contacts,
    /// Админские списки (нужен ADMIN_ENABLED на сервере).
    Admin {
        #[command(subcommand)]
        list: AdminCommand,
    },
}

#[derive(Debug, Subcommand)]
enum AdminCommand {
    /// Посты со счётчиками лайков и комментариев.
    Posts(PageArgs),
    /// Теги со счётчиком постов.
    Tags(PageArgs),
    /// Комментарии.
    Comments(PageArgs),
}

#[derive(Debug, Args)]
struct PageArgs {
    /// Размер страницы (1..=100).
    #[arg(long, default_value_t = 20)]
    limit: u32,
    /// Смещение от начала списка.
    #[arg(long, default_value_t = 0)]
    offset: u32,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let server = resolve_server(cli.server);
    let client = BlogClient::new(server).map_err(map_client_error)?;

    match cli.command {
        Command::Index => {
            let page = client.index().await.map_err(map_client_error)?;
            print_index(&page);
        }
        Command::Post { slug } => {
            let page = client.post(&slug).await.map_err(map_client_error)?;
            print_post(&page);
        }
        Command::Tag { title } => {
            let page = client.tag(&title).await.map_err(map_client_error)?;
            print_tag(&page);
        }
        Command::Contacts => {
            client.contacts().await.map_err(map_client_error)?;
            println!(
                "Контакты: {}/contacts/",
                client.base_url().trim_end_matches('/')
            );
        }
        Command::Admin { list } => match list {
            AdminCommand::Posts(page) => {
                let list = client
                    .admin_posts(page.limit, page.offset)
                    .await
                    .map_err(map_client_error)?;
                print_admin("Посты", &list, format_admin_post);
            }
            AdminCommand::Tags(page) => {
                let list = client
                    .admin_tags(page.limit, page.offset)
                    .await
                    .map_err(map_client_error)?;
                print_admin("Теги", &list, format_admin_tag);
            }
            AdminCommand::Comments(page) => {
                let list = client
                    .admin_comments(page.limit, page.offset)
                    .await
                    .map_err(map_client_error)?;
                print_admin("Комментарии", &list, format_admin_comment);
            }
        },
    }

    Ok(())
}

fn resolve_server(server: Option<String>) -> String {
    let raw = server.unwrap_or_else(|| DEFAULT_HTTP_SERVER.to_string());
    normalize_server(raw)
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn map_client_error(err: BlogClientError) -> anyhow::Error {
    let message = match err {
        BlogClientError::NotFound => "не найдено".to_string(),
        BlogClientError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        BlogClientError::Server(message) => format!("ошибка сервера: {message}"),
        BlogClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow!(message)
}

fn format_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| format!("#{} ({})", tag.title, tag.posts_with_tag))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_card(card: &PostCard) -> String {
    format!(
        "- [{}] {}: {}, {} комм., {}",
        card.slug,
        card.title,
        card.author,
        card.comments_amount,
        card.published_at.format("%Y-%m-%d")
    )
}

fn print_cards(title: &str, cards: &[PostCard]) {
    println!("{title}:");
    for card in cards {
        println!("{}", format_card(card));
    }
}

fn print_index(page: &IndexPage) {
    print_cards("Популярные посты", &page.most_popular_posts);
    print_cards("Свежие посты", &page.page_posts);
    println!("Популярные теги: {}", format_tags(&page.popular_tags));
}

fn print_post(page: &PostPage) {
    let post = &page.post;
    println!("{}", post.title);
    println!("slug: {}", post.slug);
    println!("author: {}", post.author);
    println!("published_at: {}", post.published_at);
    println!("likes: {}", post.likes_amount);
    if let Some(url) = &post.image_url {
        println!("image: {url}");
    }
    println!("tags: {}", format_tags(&post.tags));
    println!();
    println!("{}", post.text);
    println!();
    println!("Комментарии ({}):", post.comments.len());
    for comment in &post.comments {
        println!("- {} ({}): {}", comment.author, comment.published_at, comment.text);
    }
}

fn print_tag(page: &TagPage) {
    print_cards(&format!("Посты с тегом #{}", page.tag), &page.posts);
    println!("Популярные теги: {}", format_tags(&page.popular_tags));
}

fn print_admin<T>(title: &str, list: &AdminList<T>, format: fn(&T) -> String) {
    println!(
        "{}: {} (limit={}, offset={}, total={})",
        title,
        list.items.len(),
        list.limit,
        list.offset,
        list.total
    );
    for item in &list.items {
        println!("{}", format(item));
    }
}

fn format_admin_post(post: &AdminPost) -> String {
    format!(
        "- {} | {} | {} | likes={} comments={}",
        post.title, post.author, post.published_at, post.likes_count, post.comments_count
    )
}

fn format_admin_tag(tag: &AdminTag) -> String {
    format!("- {} | posts={}", tag.title, tag.posts_count)
}

fn format_admin_comment(comment: &AdminComment) -> String {
    format!(
        "- {} | {} ({}) | {} | {}",
        comment.text, comment.post, comment.post_slug, comment.author, comment.published_at
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://example.com:8080".to_string());
        assert_eq!(s, "https://example.com:8080");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server("127.0.0.1:8080".to_string());
        assert_eq!(s, "http://127.0.0.1:8080");
    }

    #[test]
    fn resolve_server_uses_default() {
        assert_eq!(resolve_server(None), DEFAULT_HTTP_SERVER);
    }

    #[test]
    fn format_tags_lists_counts() {
        let tags = vec![
            Tag {
                title: "rust".to_string(),
                posts_with_tag: 3,
            },
            Tag {
                title: "web".to_string(),
                posts_with_tag: 1,
            },
        ];
        assert_eq!(format_tags(&tags), "#rust (3), #web (1)");
    }

    #[test]
    fn admin_subcommand_parses_paging_flags() {
        let cli = Cli::try_parse_from([
            "blog-cli", "admin", "tags", "--limit", "5", "--offset", "10",
        ])
        .expect("must parse");
        match cli.command {
            Command::Admin {
                list: AdminCommand::Tags(page),
            } => {
                assert_eq!(page.limit, 5);
                assert_eq!(page.offset, 10);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn admin_subcommand_uses_default_paging() {
        let cli = Cli::try_parse_from(["blog-cli", "admin", "posts"]).expect("must parse");
        match cli.command {
            Command::Admin {
                list: AdminCommand::Posts(page),
            } => {
                assert_eq!(page.limit, 20);
                assert_eq!(page.offset, 0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn map_client_error_describes_not_found() {
        let err = map_client_error(BlogClientError::NotFound);
        assert_eq!(err.to_string(), "не найдено");
    }
}
