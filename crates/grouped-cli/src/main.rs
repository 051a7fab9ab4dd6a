mod command;
mod input;
mod report;
mod schema;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
