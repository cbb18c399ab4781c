use std::sync::Arc;

use clap::{Args, Parser, Subcommand, ValueEnum};
use portfolio_comments::{
    ClientConfig, CommentId, CommentList, CommentQuery, CommentsError, CommentsView, HttpBackend, LanguageCode,
    SessionProvider, SortOrder,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "comments", about = "Portfolio comments client")]
struct Cli {
    /// Backend origin; overrides COMMENTS_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
}

#[derive(Args, Debug, Clone)]
struct QueryArgs {
    /// Maximum number of comments to show.
    #[arg(long)]
    count: Option<usize>,

    /// `newest` or `oldest`.
    #[arg(long)]
    sort: Option<SortOrder>,

    /// Language to translate comments into, e.g. `es`.
    #[arg(long)]
    lang: Option<LanguageCode>,
}

impl QueryArgs {
    fn resolve(self, defaults: &CommentQuery) -> CommentQuery {
        CommentQuery {
            count: self.count.unwrap_or(defaults.count),
            sort: self.sort.unwrap_or(defaults.sort),
            language: self.lang.unwrap_or_else(|| defaults.language.clone()),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show comments, marking the ones you can delete.
    List(QueryArgs),
    /// Delete one of your own comments.
    Delete {
        id: i64,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Delete every comment.
    DeleteAll(QueryArgs),
    /// Post a new comment.
    Post {
        text: String,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Show the current login state.
    Whoami,
    /// Look up the email associated with a user name.
    Email { user_name: String },
    /// Choose your display name.
    SetName { user_name: String },
}

#[tokio::main]
async fn main() -> Result<(), CommentsError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }

    let backend = Arc::new(HttpBackend::new(&config)?);
    let mut view = CommentsView::new(backend.clone(), backend.clone());
    let defaults = config.default_query.clone();
    tracing::debug!(base_url = backend.base_url(), "backend configured");

    match cli.command {
        Command::List(query) => {
            view.refresh(query.resolve(&defaults)).await?;
        }
        Command::Delete { id, query } => {
            view.refresh(query.resolve(&defaults)).await?;
            view.delete_one(CommentId(id)).await?;
        }
        Command::DeleteAll(query) => {
            view.refresh(query.resolve(&defaults)).await?;
            view.delete_all().await?;
        }
        Command::Post { text, query } => {
            view.refresh(query.resolve(&defaults)).await?;
            view.post_comment(&text).await?;
        }
        Command::Whoami => {
            let session = backend.current_session().await?;
            let email = session.email.as_deref().unwrap_or("no email");
            match (session.logged_in, session.user_name.as_deref()) {
                (false, _) => println!("not logged in"),
                (true, None) => println!("logged in ({email}) without a user name; run `comments set-name`"),
                (true, Some(name)) => println!("logged in as {name} ({email})"),
            }
            return Ok(());
        }
        Command::Email { user_name } => {
            match backend.user_email(&user_name).await? {
                Some(email) => println!("{email}"),
                None => println!("no email on record for {user_name}"),
            }
            return Ok(());
        }
        Command::SetName { user_name } => {
            backend.set_user_name(&user_name).await?;
            println!("user name set to {user_name}");
            return Ok(());
        }
    }

    print_list(view.list(), cli.format);
    Ok(())
}

fn print_list(list: &CommentList, format: OutputFormat) {
    match format {
        OutputFormat::Html => println!("{}", list.to_html()),
        OutputFormat::Text => {
            println!("{} comment(s)", list.len());
            print!("{}", list.to_text());
        }
    }
}
