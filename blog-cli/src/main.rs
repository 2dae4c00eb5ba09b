use anyhow::{Context, bail};
use blog_client::{BlogClient, BlogClientError, NewPost, NewUser, PostPatch, PostUpdate};
use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser, Debug)]
struct Cli {
    #[clap(short, long, default_value = "http://127.0.0.1:8000")]
    server: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    CreateUser {
        #[clap(long)]
        username: String,
        #[clap(long)]
        email: String,
    },
    GetUser {
        id: i64,
    },
    UserPosts {
        id: i64,
    },
    ListPosts,
    GetPost {
        id: i64,
    },
    CreatePost {
        #[clap(long)]
        user_id: i64,
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
    },
    UpdatePost {
        id: i64,
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
    },
    PatchPost {
        id: i64,
        #[clap(long)]
        title: Option<String>,
        #[clap(long)]
        content: Option<String>,
    },
    DeletePost {
        id: i64,
    },
    /// Creates a user and a post, edits it with PUT and PATCH, deletes it and
    /// checks that it is gone.
    Smoke,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let client = BlogClient::connect(&args.server)?;

    match args.command {
        Command::CreateUser { username, email } => {
            let user = client.create_user(&NewUser { username, email }).await?;
            println!("User created: {}", user);
        }
        Command::GetUser { id } => {
            println!("{}", client.get_user(id).await?);
        }
        Command::UserPosts { id } => {
            let posts = client.list_user_posts(id).await?;
            println!("Posts ({})", posts.len());
            for post in posts {
                println!("- {}", post);
            }
        }
        Command::ListPosts => {
            let posts = client.list_posts().await?;
            println!("Posts ({})", posts.len());
            for post in posts {
                println!("- {}", post);
            }
        }
        Command::GetPost { id } => {
            let post = client.get_post(id).await?;
            println!("{}\n\n{}", post, post.content);
        }
        Command::CreatePost {
            user_id,
            title,
            content,
        } => {
            let post = client
                .create_post(&NewPost {
                    title,
                    content,
                    user_id,
                })
                .await?;
            println!("Post created! ID: {}", post.id);
        }
        Command::UpdatePost { id, title, content } => {
            let post = client.update_post(id, &PostUpdate { title, content }).await?;
            println!("Post updated: {}", post)
        }
        Command::PatchPost { id, title, content } => {
            let post = client.patch_post(id, &PostPatch { title, content }).await?;
            println!("Post patched: {}", post)
        }
        Command::DeletePost { id } => {
            client.delete_post(id).await?;
            println!("Post deleted!")
        }
        Command::Smoke => smoke(&client).await?,
    }

    Ok(())
}

async fn smoke(client: &BlogClient) -> anyhow::Result<()> {
    println!("Testing against {}", client.base_url());

    let suffix = Uuid::new_v4().simple().to_string()[..8].to_string();
    let user = client
        .create_user(&NewUser {
            username: format!("user{}", suffix),
            email: format!("user{}@example.com", suffix),
        })
        .await
        .context("creating user")?;
    println!("Created user: {}", user.id);

    let post = client
        .create_post(&NewPost {
            title: format!("Original Title {}", suffix),
            content: "Original content.".into(),
            user_id: user.id,
        })
        .await
        .context("creating post")?;
    println!("Created post: {}", post.id);

    let title = format!("Updated Title {}", suffix);
    let updated = client
        .update_post(
            post.id,
            &PostUpdate {
                title: title.clone(),
                content: "Updated content.".into(),
            },
        )
        .await
        .context("updating post (PUT)")?;
    if updated.title != title {
        bail!("PUT verification failed: title is {:?}", updated.title);
    }
    println!("PUT verification: SUCCESS");

    let patched = client
        .patch_post(
            post.id,
            &PostPatch {
                title: None,
                content: Some("Patched content.".into()),
            },
        )
        .await
        .context("updating post (PATCH)")?;
    if patched.title != title || patched.content != "Patched content." {
        bail!("PATCH verification failed: {:?}", patched);
    }
    println!("PATCH verification: SUCCESS");

    client.delete_post(post.id).await.context("deleting post")?;
    match client.get_post(post.id).await {
        Err(BlogClientError::NotFound(_)) => println!("Delete verification: SUCCESS"),
        Ok(_) => bail!("Delete verification failed: post {} still exists", post.id),
        Err(e) => return Err(e).context("verifying delete"),
    }

    Ok(())
}
