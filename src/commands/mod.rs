mod config_cmd;
mod material;
mod product;
mod suggest;

use clap::ValueEnum;

pub use config_cmd::ConfigCommand;
pub use material::MaterialCommand;
pub use product::ProductCommand;
pub use suggest::SuggestCommand;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
