use super::AppContext;
use crate::contact::ContactPolicy;
use crate::content::Content;
use crate::interactive::{run_interactive, InteractiveOptions};
use crate::session::{
    default_store_path, FileSessionStore, Flow, MemorySessionStore, SessionContext, SessionStore,
};
use crate::submission::submitter_from_config;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub link: Option<String>,
    pub offline: bool,
    pub fresh_session: bool,
    pub session_file: Option<PathBuf>,
}

pub fn handle_run(args: RunArgs, app: &AppContext) -> Result<()> {
    let submitter = submitter_from_config(&app.config.submission, args.offline);
    let policy = ContactPolicy::with_blocked_domains(&app.config.contact.extra_blocked_domains);
    let options = InteractiveOptions {
        submitter: submitter.as_ref(),
        policy: &policy,
        share_base_url: &app.config.share.base_url,
        formatting: app.formatting,
    };
    let link = args.link.as_deref();

    if args.fresh_session {
        return run_session(SessionContext::new(MemorySessionStore::new()), link, &options);
    }

    let path = args
        .session_file
        .or_else(|| app.config.session.store_path.clone())
        .or_else(default_store_path);
    match path {
        Some(path) => {
            let store = FileSessionStore::open(path);
            tracing::debug!("using session file {}", store.path().display());
            run_session(SessionContext::new(store), link, &options)
        }
        None => {
            tracing::warn!("no cache directory available; the session will not be remembered");
            run_session(SessionContext::new(MemorySessionStore::new()), link, &options)
        }
    }
}

fn run_session<S: SessionStore>(
    mut ctx: SessionContext<S>,
    link: Option<&str>,
    options: &InteractiveOptions<'_>,
) -> Result<()> {
    let mut flow = Flow::start(link, &ctx, Content::standard());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_interactive(&mut flow, &mut ctx, stdin.lock(), stdout.lock(), options)?;
    Ok(())
}
