mod app;
mod entry;
mod system;

use g0::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
