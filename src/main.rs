mod app;
mod entry;
mod logger;

use volley::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
