pub type CmdResult<T> = inspect_rewrite::Result<(T, i32)>;

pub mod rewrite;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
) -> (inspect_rewrite::Result<serde_json::Value>, i32) {
    crate::tty::status("inspect-rewrite is working...");

    match command {
        crate::Commands::Rewrite(args) => dispatch!(args, rewrite),
    }
}
