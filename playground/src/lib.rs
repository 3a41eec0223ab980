pub mod args;
pub mod modes;
mod output;
pub mod repl;

pub use args::Args;

use modes::{run_demo, run_free, run_self_test};
use prompt::{
    prompt_user_for_confirm, prompt_user_for_element_kind, prompt_user_for_mode, ElementKind,
    Mode,
};
use repl::Session;
use std::io::{BufRead, Write};
use termcolor::WriteColor;

/// Runs the mode given on the command line, or keeps prompting for modes
/// until the user exits. Returns false if a self-test failed.
pub fn run<R: BufRead, W: WriteColor>(
    args: &Args,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<bool> {
    if let Some(mode) = args.mode {
        return run_mode(mode, args, input, output);
    }
    let mut all_passed = true;
    loop {
        let Some(mode) = prompt_user_for_mode(input, output)? else {
            break;
        };
        if mode == Mode::Exit {
            break;
        }
        all_passed &= run_mode(mode, args, input, output)?;
        if prompt_user_for_confirm("\ncontinue?", input, output)? != Some(true) {
            break;
        }
    }
    writeln!(output, "goodbye")?;
    Ok(all_passed)
}

fn run_mode<R: BufRead, W: WriteColor>(
    mode: Mode,
    args: &Args,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<bool> {
    log::info!("running {} mode", mode);
    match mode {
        Mode::Demo => run_demo(output)?,
        Mode::Test => return run_self_test(output),
        Mode::Free => run_free(output)?,
        Mode::Playground => run_playground(args, input, output)?,
        Mode::Exit => {}
    }
    Ok(true)
}

fn run_playground<R: BufRead, W: WriteColor>(
    args: &Args,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let kind = match args.element {
        Some(kind) => kind,
        None => match prompt_user_for_element_kind(input, output)? {
            Some(kind) => kind,
            None => return Ok(()),
        },
    };
    let config = args.queue_config();
    log::debug!("playground over {} elements with {:?}", kind, config);
    match kind {
        ElementKind::Int => Session::<i64>::new(config).run(input, output)?,
        ElementKind::Double => Session::<f64>::new(config).run(input, output)?,
        ElementKind::Text => Session::<String>::new(config).run(input, output)?,
    }
    Ok(())
}
