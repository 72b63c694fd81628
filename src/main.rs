reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(sql);
reexport!(metadata);
reexport!(logic);
reexport!(advisor);
reexport!(engine);
reexport!(assistant);
reexport!(session);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

use tokio::io::{AsyncBufReadExt as _, AsyncWriteExt as _, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = config();
    let assistant = config.api_key.as_deref().map(|key| {
        let mut gemini = Gemini::new(key, config.model.as_str());
        if let Some(endpoint) = &config.assistant_endpoint {
            gemini = gemini.with_endpoint(endpoint.as_str());
        }
        info!("Assistant enabled with model {}", gemini.model());
        CachedAssistant::new(gemini, config.assistant_cache)
    });
    if assistant.is_none() {
        info!("No API key configured, assistant commands are disabled");
    }
    let dispatcher = Dispatcher::new(Validator::new(config.fuzzy_threshold), assistant);

    let mut state = SessionState::default();
    let mut stdout = tokio::io::stdout();
    let open = Command::LoadDatabase(config.database_url.clone());
    state = step(&dispatcher, state, open, &mut stdout).await?;

    let mut reader = LineReader::default();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt(&mut stdout, &reader).await?;
    while let Some(line) = lines.next_line().await? {
        match reader.feed(&line) {
            None => {}
            Some(Input::Quit) => break,
            Some(Input::Help) => print(&mut stdout, HELP).await?,
            Some(Input::Invalid(message)) => print(&mut stdout, &message).await?,
            Some(Input::ShowSchema) => print(&mut stdout, &render_schema(&state.schema)).await?,
            Some(Input::Command(command)) => {
                state = step(&dispatcher, state, command, &mut stdout).await?;
            }
            Some(Input::Sql(sql)) => {
                state = step(&dispatcher, state, Command::Edit(sql), &mut stdout).await?;
                state = step(&dispatcher, state, Command::Execute, &mut stdout).await?;
            }
        }
        prompt(&mut stdout, &reader).await?;
    }

    if let Some(engine) = &state.engine {
        engine.close().await;
    }
    Ok(())
}

/// Dispatch one command and print its outcome. A failed command is reported
/// and leaves the session as it was.
async fn step<A: Assistant>(
    dispatcher: &Dispatcher<A>,
    state: SessionState,
    command: Command,
    stdout: &mut tokio::io::Stdout,
) -> Result<SessionState> {
    match dispatcher.dispatch(&state, command).await {
        Ok((next, outcome)) => {
            print(stdout, &render(&outcome)).await?;
            Ok(next)
        }
        Err(err) => {
            error!("{err}");
            print(stdout, &format!("Error: {err}")).await?;
            Ok(state)
        }
    }
}

async fn print(stdout: &mut tokio::io::Stdout, text: &str) -> Result {
    if text.is_empty() {
        return Ok(());
    }
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    Ok(stdout.flush().await?)
}

async fn prompt(stdout: &mut tokio::io::Stdout, reader: &LineReader) -> Result {
    let marker = if reader.is_pending() { "   ...> " } else { "coquery> " };
    stdout.write_all(marker.as_bytes()).await?;
    Ok(stdout.flush().await?)
}

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
