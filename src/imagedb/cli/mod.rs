//! Interactive terminal session.
//!
//! Reads one command per line from stdin and drives an [`ImageDbApi`]. Saves and deletes are
//! spawned onto the current `LocalSet` so the prompt comes back while they are in flight; their
//! outcome is printed when they resolve. `wait`, `quit` and end of input drain whatever is still
//! pending, since store calls are never cancelled.

mod line;
mod print;

use crate::args::{SessionCommand, SessionLine};
use clap::Parser;
use colored::Colorize;
use imagedb::api::ImageDbApi;
use imagedb::error::Result;
use imagedb::model::{ImageId, SubmissionPayload};
use imagedb::store::RemoteStore;
use imagedb::upload::{self, UploadForm};
use std::io::{IsTerminal, Write};
use std::rc::Rc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use self::line::split_line;
use self::print::{print_draft, print_error, print_images, print_messages, print_preview};

const PROMPT: &str = "imagedb> ";

enum Flow {
    Continue,
    Quit,
}

pub struct Session<S: RemoteStore + 'static> {
    api: Rc<ImageDbApi<S>>,
    form: UploadForm,
    tasks: Vec<JoinHandle<()>>,
    interactive: bool,
}

impl<S: RemoteStore + 'static> Session<S> {
    pub fn new(api: ImageDbApi<S>) -> Self {
        Self {
            api: Rc::new(api),
            form: UploadForm::new(),
            tasks: Vec::new(),
            interactive: std::io::stdin().is_terminal(),
        }
    }

    /// Runs until `quit` or end of input. Must be called inside a `LocalSet`.
    pub async fn run(mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            self.prompt();
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if let Flow::Quit = self.handle_line(&line).await {
                break;
            }
        }

        self.drain().await;
        Ok(())
    }

    fn prompt(&self) {
        if !self.interactive {
            return;
        }
        let marker = if self.api.is_loading() { "…" } else { "" };
        print!("{}{}", marker.dimmed(), PROMPT);
        let _ = std::io::stdout().flush();
    }

    async fn handle_line(&mut self, line: &str) -> Flow {
        let words = match split_line(line) {
            Ok(words) if words.is_empty() => return Flow::Continue,
            Ok(words) => words,
            Err(e) => {
                print_error(e);
                return Flow::Continue;
            }
        };

        let command = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                let _ = e.print();
                return Flow::Continue;
            }
        };

        self.tasks.retain(|task| !task.is_finished());
        self.dispatch(command).await
    }

    async fn dispatch(&mut self, command: SessionCommand) -> Flow {
        match command {
            SessionCommand::Select { path } => {
                let staged = self.form.select(path).await.map(|_| ());
                match staged {
                    Ok(()) => self.print_form(),
                    Err(e) => print_error(e),
                }
            }
            SessionCommand::Name { name } => {
                self.form.set_name(name.join(" "));
                self.print_form();
            }
            SessionCommand::Tags { tags } => {
                self.form.set_tags(tags.join(" "));
                self.print_form();
            }
            SessionCommand::Save => match self.form.submit() {
                Ok(payload) => self.spawn_save(payload),
                Err(e) => print_error(e),
            },
            SessionCommand::Upload { path, name, tags } => match upload::stage_file(&path).await {
                Ok(draft) => self.spawn_save(upload::build_submission(&draft, &name, &tags)),
                Err(e) => print_error(e),
            },
            SessionCommand::List { query } => print_images(&self.api.list_images(&query.join(" "))),
            SessionCommand::View { id } => match self.api.open_preview(id) {
                Ok(result) => {
                    if let Some(record) = &result.preview {
                        print_preview(record);
                    }
                }
                Err(e) => print_error(e),
            },
            SessionCommand::Close => {
                self.api.close_preview();
                println!("{}", "Preview closed".dimmed());
            }
            SessionCommand::Delete { id } => self.spawn_delete(id),
            SessionCommand::Status => self.print_status(),
            SessionCommand::Wait => self.drain().await,
            SessionCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn spawn_save(&mut self, payload: SubmissionPayload) {
        println!("{}", format!("Saving '{}'…", payload.name).dimmed());
        let api = Rc::clone(&self.api);
        self.tasks.push(tokio::task::spawn_local(async move {
            let result = api.add_image(payload).await;
            print_messages(&result.messages);
        }));
    }

    fn spawn_delete(&mut self, id: ImageId) {
        println!("{}", format!("Deleting {}…", id).dimmed());
        let api = Rc::clone(&self.api);
        self.tasks.push(tokio::task::spawn_local(async move {
            let result = api.delete_image(id).await;
            print_messages(&result.messages);
        }));
    }

    async fn drain(&mut self) {
        for task in self.tasks.drain(..) {
            if let Err(e) = task.await {
                log::error!("session task failed: {}", e);
            }
        }
    }

    fn print_form(&self) {
        match self.form.draft() {
            Some(draft) => print_draft(draft, self.form.name(), self.form.tags()),
            None => println!("{}", "No file selected; use `select <path>` first.".yellow()),
        }
    }

    fn print_status(&self) {
        let pending = self.api.pending_operations();
        if pending == 0 {
            println!("Idle");
        } else {
            println!("Loading ({} pending)", pending);
        }
        match self.api.preview() {
            Some(record) => println!("Previewing {} ({})", record.id, record.name),
            None => println!("No preview open"),
        }
        if let Some(draft) = self.form.draft() {
            print_draft(draft, self.form.name(), self.form.tags());
        }
    }
}
