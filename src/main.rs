mod entry;
mod logger;

use loadprobe::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
