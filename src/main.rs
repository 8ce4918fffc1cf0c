pub mod naming;
pub mod inference;
pub mod analyze;
pub mod codegen;
pub mod error;
pub mod cli;

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.run()
}
