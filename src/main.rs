mod entry;
mod logger;

use vubench::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
