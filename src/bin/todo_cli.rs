use clap::{Parser, Subcommand};
use serde_json::json;

use taskhub::client::{
    session::{self, Session},
    ApiClient, ClientError,
};
use taskhub::todos::Todo;

#[derive(Parser)]
#[command(name = "todo-cli", about = "Command-line client for the taskhub API")]
struct Cli {
    /// Server base URL
    #[arg(long, env = "TASKHUB_URL", default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an account and start a session
    Signup { email: String, password: String },
    /// Log in and store the session token
    Login { email: String, password: String },
    /// Forget the stored session
    Logout,
    /// Show who the stored session belongs to
    Whoami,
    /// List your todos, newest first
    List,
    /// Add a todo
    Add {
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Mark a todo completed
    Done { id: i64 },
    /// Mark a todo not completed
    Undone { id: i64 },
    /// Commit a new title for a todo
    Edit { id: i64, title: String },
    /// Delete a todo
    Rm { id: i64 },
}

fn render(todos: &[Todo]) {
    if todos.is_empty() {
        println!("No todos yet.");
        return;
    }
    for todo in todos {
        let mark = if todo.completed { "x" } else { " " };
        match &todo.description {
            Some(desc) if !desc.is_empty() => {
                println!("{:>4} [{}] {} - {}", todo.id, mark, todo.title, desc)
            }
            _ => println!("{:>4} [{}] {}", todo.id, mark, todo.title),
        }
    }
}

fn authed_client(url: &str) -> anyhow::Result<ApiClient> {
    let session = session::load()
        .ok_or_else(|| anyhow::anyhow!("not logged in; run `todo-cli login <email> <password>`"))?;
    Ok(ApiClient::new(url, Some(session.token)))
}

/// An expired or rejected token sends the user back to login.
fn on_error(err: ClientError) -> anyhow::Error {
    match err {
        ClientError::Unauthenticated => {
            session::clear();
            anyhow::anyhow!("session expired; please log in again")
        }
        other => anyhow::anyhow!("{}", other),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Signup { email, password } => {
            let api = ApiClient::new(&cli.url, None);
            let auth = api.signup(&email, &password).await.map_err(on_error)?;
            session::save(&Session {
                token: auth.token,
                email: auth.user.email.clone(),
            })?;
            println!("Signed up and logged in as {}", auth.user.email);
        }
        Command::Login { email, password } => {
            let api = ApiClient::new(&cli.url, None);
            let auth = api.login(&email, &password).await.map_err(on_error)?;
            session::save(&Session {
                token: auth.token,
                email: auth.user.email.clone(),
            })?;
            println!("Logged in as {}", auth.user.email);
        }
        Command::Logout => {
            session::clear();
            println!("Logged out.");
        }
        Command::Whoami => {
            let api = authed_client(&cli.url)?;
            let user = api.me().await.map_err(on_error)?;
            println!("{} (id {})", user.email, user.id);
        }
        Command::List => {
            let api = authed_client(&cli.url)?;
            let todos = api.list_todos().await.map_err(on_error)?;
            render(&todos);
        }
        Command::Add { title, description } => {
            let api = authed_client(&cli.url)?;
            let todo = api
                .create_todo(&title, description.as_deref())
                .await
                .map_err(on_error)?;
            println!("Added #{}: {}", todo.id, todo.title);
        }
        Command::Done { id } => {
            let api = authed_client(&cli.url)?;
            let todo = api
                .update_todo(id, json!({ "completed": true }))
                .await
                .map_err(on_error)?;
            println!("Done #{}: {}", todo.id, todo.title);
        }
        Command::Undone { id } => {
            let api = authed_client(&cli.url)?;
            let todo = api
                .update_todo(id, json!({ "completed": false }))
                .await
                .map_err(on_error)?;
            println!("Reopened #{}: {}", todo.id, todo.title);
        }
        Command::Edit { id, title } => {
            let api = authed_client(&cli.url)?;
            let todo = api
                .update_todo(id, json!({ "title": title }))
                .await
                .map_err(on_error)?;
            println!("Updated #{}: {}", todo.id, todo.title);
        }
        Command::Rm { id } => {
            let api = authed_client(&cli.url)?;
            api.delete_todo(id).await.map_err(on_error)?;
            println!("Deleted #{}", id);
        }
    }

    Ok(())
}
