//! apps/browser/src/ui/shell.rs
//!
//! The line-oriented terminal front-end. Each command drives the core's
//! command/query surface; every domain error is shown as a single blocking
//! message after which the user may retry with different input.

use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_browser_core::{Criteria, Error as CoreError, TagFilter, TimeFilter};

use crate::error::AppError;
use crate::ui::render;
use crate::ui::state::AppState;

const HELP: &str = "\
Commands:
  search [words...]        search titles and summaries
  diet <tag|all>           set the diet filter and search again
  cuisine <tag|all>        set the cuisine filter and search again
  time <minutes|any>       set the max preparation time and search again
  filters                  show the active filters
  more                     load the next page of results
  show <id>                open a recipe's detail view
  reviews <id>             list a recipe's reviews
  review <id> <1-5> <text> leave a review (sign in first)
  register <email> <password> [username]
  login <email> <password>
  logout
  whoami                   show the signed-in user
  help                     show this help
  quit                     leave the browser";

pub struct Shell {
    state: AppState,
    criteria: Criteria,
    has_more: bool,
}

impl Shell {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            criteria: Criteria::default(),
            has_more: false,
        }
    }

    /// Preselects the diet filter ahead of the first fetch, the terminal
    /// analog of arriving with a `diet` query parameter.
    pub fn preset_diet(&mut self, diet: &str) {
        self.criteria.diet = TagFilter::parse(diet);
    }

    /// Runs the interactive loop until `quit` or end of input.
    pub async fn run(&mut self) -> Result<(), AppError> {
        println!("Recipe Browser. Type `help` for commands.");
        self.run_search().await?;
        prompt()?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if !self.handle(&line).await? {
                return Ok(());
            }
            prompt()?;
        }
        Ok(())
    }

    /// Handles one command line; returns `false` when the user quits.
    pub async fn handle(&mut self, line: &str) -> Result<bool, AppError> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Ok(true);
        };
        let rest: Vec<&str> = parts.collect();

        match command {
            "help" => println!("{HELP}"),
            "search" => {
                self.criteria.query = rest.join(" ");
                self.run_search().await?;
            }
            "diet" => {
                self.criteria.diet = TagFilter::parse(&rest.join(" "));
                self.run_search().await?;
            }
            "cuisine" => {
                self.criteria.cuisine = TagFilter::parse(&rest.join(" "));
                self.run_search().await?;
            }
            "time" => {
                self.criteria.max_time = TimeFilter::parse(&rest.join(" "));
                self.run_search().await?;
            }
            "filters" => self.show_filters(),
            "more" => {
                if self.has_more {
                    println!("Loading recipes...");
                    let page = self.state.browser.load_more().await;
                    self.has_more = page.has_more;
                    println!("{}", render::page(&page));
                } else {
                    println!("No more recipes to load.");
                }
            }
            "show" => match parse_id(&rest) {
                Some(id) => self.show_recipe(id).await?,
                None => println!("Usage: show <id>"),
            },
            "reviews" => match parse_id(&rest) {
                Some(id) => {
                    let reviews = self.state.reviews.list(id).await?;
                    if reviews.is_empty() {
                        println!("No reviews yet. Be the first to review this recipe!");
                    }
                    for review in reviews {
                        println!(
                            "  {} {}: {}",
                            render::stars(review.rating),
                            review.username,
                            review.text
                        );
                    }
                }
                None => println!("Usage: reviews <id>"),
            },
            "review" => self.add_review(&rest).await?,
            "register" => match rest.as_slice() {
                [email, password] => self.register(email, password, "").await?,
                [email, password, username] => self.register(email, password, username).await?,
                _ => println!("Usage: register <email> <password> [username]"),
            },
            "login" => match rest.as_slice() {
                [email, password] => {
                    match self.state.auth.login(email, password).await {
                        Ok(user) => println!("Logged in successfully! Welcome back, {}.", user.username),
                        Err(err) => report(err),
                    }
                }
                _ => println!("Usage: login <email> <password>"),
            },
            "logout" => {
                self.state.auth.logout().await?;
                println!("Logged out successfully!");
            }
            "whoami" => match self.state.auth.current_user().await? {
                Some(user) => println!("Signed in as {} ({})", user.username, user.email),
                None => println!("Not signed in."),
            },
            "quit" | "exit" => return Ok(false),
            other => println!("Unknown command `{other}`. Type `help` for commands."),
        }
        Ok(true)
    }

    async fn run_search(&mut self) -> Result<(), AppError> {
        println!("Loading recipes...");
        let page = self.state.browser.search(self.criteria.clone()).await;
        self.has_more = page.has_more;
        println!("{}", render::page(&page));
        Ok(())
    }

    fn show_filters(&self) {
        let diet = match &self.criteria.diet {
            TagFilter::All => "all".to_string(),
            TagFilter::Tag(tag) => tag.clone(),
        };
        let cuisine = match &self.criteria.cuisine {
            TagFilter::All => "all".to_string(),
            TagFilter::Tag(tag) => tag.clone(),
        };
        let time = match self.criteria.max_time {
            TimeFilter::Any => "any".to_string(),
            TimeFilter::AtMost(minutes) => format!("{minutes} min"),
        };
        println!(
            "query: \"{}\"  diet: {}  cuisine: {}  max time: {}",
            self.criteria.query, diet, cuisine, time
        );
    }

    async fn show_recipe(&mut self, id: u32) -> Result<(), AppError> {
        println!("Loading recipe...");
        match self.state.browser.recipe(id).await {
            Ok(recipe) => {
                let reviews = self.state.reviews.list(id).await?;
                println!("{}", render::detail(&recipe, &reviews));
            }
            Err(err) => report(err),
        }
        Ok(())
    }

    async fn add_review(&mut self, rest: &[&str]) -> Result<(), AppError> {
        let (id, rating, text) = match rest {
            [id, rating, text @ ..] if !text.is_empty() => {
                match (id.parse::<u32>(), rating.parse::<u8>()) {
                    (Ok(id), Ok(rating)) => (id, rating, text.join(" ")),
                    _ => {
                        println!("Usage: review <id> <1-5> <text>");
                        return Ok(());
                    }
                }
            }
            _ => {
                println!("Usage: review <id> <1-5> <text>");
                return Ok(());
            }
        };

        let session = self.state.auth.session().await?;
        match self.state.reviews.add(&session, id, rating, &text).await {
            Ok(_) => println!("Review submitted successfully!"),
            Err(err) => report(err),
        }
        Ok(())
    }

    async fn register(&mut self, email: &str, password: &str, username: &str) -> Result<(), AppError> {
        match self.state.auth.register(email, password, username).await {
            Ok(user) => println!("Account created successfully! Signed in as {}.", user.username),
            Err(err) => report(err),
        }
        Ok(())
    }
}

/// Shows a domain failure as the single blocking notification the user
/// must acknowledge by issuing another command.
fn report(err: CoreError) {
    println!("Error: {err}");
}

fn parse_id(rest: &[&str]) -> Option<u32> {
    match rest {
        [id] => id.parse().ok(),
        _ => None,
    }
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}
