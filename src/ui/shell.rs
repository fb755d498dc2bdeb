//! Interactive line shell over the user store.
//!
//! The shell only reads store snapshots and calls store operations; it
//! never touches the collection directly.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::users::UserStore;

use super::command::{self, Command, ParseError, HELP};
use super::form::{Field, UserForm};
use super::table;

const BANNER: &str = "User Management. Type 'help' for commands.";
const PROMPT: &str = "> ";

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    store: UserStore,
    input: R,
    output: W,
    fetch_on_start: bool,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(store: UserStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            fetch_on_start: true,
        }
    }

    /// Whether `run` fetches the directory before the first prompt.
    pub fn fetch_on_start(mut self, enabled: bool) -> Self {
        self.fetch_on_start = enabled;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and execute commands until `quit` or end of input.
    pub async fn run(&mut self) -> io::Result<()> {
        self.write_line(BANNER).await?;

        if self.fetch_on_start && self.store.snapshot().is_empty() {
            self.execute(Command::Refresh).await?;
        }

        loop {
            self.write(PROMPT).await?;
            let Some(line) = self.read_line().await? else {
                break;
            };

            let flow = match command::parse(&line) {
                Ok(cmd) => self.execute(cmd).await?,
                Err(err) => {
                    self.write_line(&err.to_string()).await?;
                    if matches!(err, ParseError::UnknownCommand(_)) {
                        self.write_line("Type 'help' for available commands.").await?;
                    }
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.output.flush().await
    }

    pub async fn execute(&mut self, cmd: Command) -> io::Result<Flow> {
        match cmd {
            Command::Empty => {}
            Command::List => {
                let listing = table::render_list(&self.store.snapshot());
                self.write_line(&listing).await?;
            }
            Command::Show { id } => match self.store.get(id) {
                Some(user) => self.write_line(&table::render_detail(&user)).await?,
                None => self.write_line(&not_found(id)).await?,
            },
            Command::Refresh => {
                self.write_line("Loading...").await?;
                self.store.fetch_users().await;
                let state = self.store.snapshot();
                let listing = table::render_list(&state);
                self.write_line(&listing).await?;
            }
            Command::Add { assignments } => {
                let mut form = UserForm::default();
                for (field, value) in assignments {
                    form.set(field, value);
                }
                match form.into_new_user() {
                    Ok(fields) => {
                        let user = self.store.add_user(fields);
                        self.write_line(&format!("User added successfully (id {})", user.id))
                            .await?;
                    }
                    Err(errors) => self.write_line(&errors.to_string()).await?,
                }
            }
            Command::Edit { id, assignments } => {
                let Some(user) = self.store.get(id) else {
                    self.write_line(&not_found(id)).await?;
                    return Ok(Flow::Continue);
                };

                let mut form = UserForm::from_user(&user);
                let mut touched: Vec<Field> = Vec::new();
                for (field, value) in assignments {
                    form.set(field, value);
                    if !touched.contains(&field) {
                        touched.push(field);
                    }
                }

                match form.to_patch(&user, &touched) {
                    Ok(patch) => {
                        if self.store.update_user(id, patch) {
                            self.write_line("User updated successfully").await?;
                        } else {
                            // Deleted between lookup and update.
                            self.write_line(&not_found(id)).await?;
                        }
                    }
                    Err(errors) => self.write_line(&errors.to_string()).await?,
                }
            }
            Command::Delete { id } => {
                let Some(user) = self.store.get(id) else {
                    self.write_line(&not_found(id)).await?;
                    return Ok(Flow::Continue);
                };

                self.write(&format!(
                    "Delete {}? This action cannot be undone. [y/N] ",
                    user.name
                ))
                .await?;
                let answer = self.read_line().await?.unwrap_or_default();

                if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                    self.write_line("Cancelled").await?;
                } else if self.store.delete_user(id) {
                    self.write_line("User deleted successfully").await?;
                } else {
                    // Removed while the prompt was open.
                    self.write_line(&not_found(id)).await?;
                }
            }
            Command::Clear => {
                self.store.clear();
                self.write_line("Directory cleared").await?;
            }
            Command::Help => self.write_line(HELP).await?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }
}

fn not_found(id: i64) -> String {
    format!("User {} not found", id)
}
