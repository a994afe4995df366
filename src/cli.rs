use clap::{Args, Parser, Subcommand};

/// GoRestaurant: browse a dish, pick extras and place an order from the terminal.
#[derive(Parser, Debug)]
#[command(name = "go_restaurant")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub settings: Settings,
}

/// Settings shared by every command. Each can also come from the environment.
#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Base URL of the GoRestaurant API.
    #[arg(long, env = "GO_RESTAURANT_API_URL", default_value = crate::config::DEFAULT_API_URL)]
    pub api_url: String,

    /// Milliseconds between confirming an order and leaving the screen.
    #[arg(long, env = "GO_RESTAURANT_EXIT_DELAY_MS", default_value = "2000")]
    pub exit_delay_ms: u64,

    /// Locale used to format prices (pt-BR or en-US).
    #[arg(long, env = "GO_RESTAURANT_LOCALE", default_value = "pt-BR")]
    pub locale: String,

    /// HTTP request timeout in seconds.
    #[arg(long, env = "GO_RESTAURANT_TIMEOUT_SECS", default_value = "10")]
    pub timeout_secs: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive details screen for a food.
    Order {
        /// Food identifier.
        id: i64,
    },

    /// Print a food's details and extras.
    Show {
        /// Food identifier.
        id: i64,
    },

    /// Compute an order total without the interactive screen.
    Quote {
        /// Food identifier.
        id: i64,

        /// Number of units of the food.
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Extra selection as NAME=QTY or ID=QTY (repeatable).
        #[arg(short, long = "extra")]
        extras: Vec<String>,

        /// Also place the order.
        #[arg(long)]
        submit: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote() {
        let cli = Cli::parse_from([
            "go_restaurant",
            "--api-url",
            "http://api.test",
            "quote",
            "3",
            "-q",
            "2",
            "--extra",
            "bacon=1",
            "--extra",
            "7=2",
        ]);

        assert_eq!(cli.settings.api_url, "http://api.test");
        match cli.command {
            Command::Quote {
                id,
                quantity,
                extras,
                submit,
            } => {
                assert_eq!(id, 3);
                assert_eq!(quantity, 2);
                assert_eq!(extras, vec!["bacon=1", "7=2"]);
                assert!(!submit);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
