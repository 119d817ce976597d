use std::process::exit;

use log::error;

use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod global_options;
mod workflow;

fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    if let Err(e) = global_options::setup_logger(&options) {
        eprintln!("{e:#}");
        exit(1);
    }

    if let Err(e) = create_and_exec_workflow_from_cmd(&options) {
        error!("Could not complete workflow, reason {e:#}");
        exit(1);
    }
}
