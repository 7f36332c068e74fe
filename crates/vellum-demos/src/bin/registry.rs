//! Shared loggers through a keyed registry, with header alignment.

use vellum_core::{vdebug, vinfo, Registry};
use vellum_types::{VellumError, DEBUG};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Channel {
    Local = 10,
    Global = 20,
    Admin = 30,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Local => write!(f, "local"),
            Channel::Global => write!(f, "global"),
            Channel::Admin => write!(f, "admin"),
        }
    }
}

fn main() {
    let registry: Registry<Channel> = Registry::new();

    registry
        .create(Channel::Local, "local", DEBUG, '|')
        .expect("fresh registry");
    registry
        .create(Channel::Global, "global", DEBUG, '|')
        .expect("fresh registry");
    registry
        .create(Channel::Admin, "admin", DEBUG, '|')
        .expect("fresh registry");

    // Headers were padded to a common width, so the columns line up.
    for channel in [Channel::Local, Channel::Global, Channel::Admin] {
        let logger = registry.get(&channel).expect("created above");
        vdebug!(logger, "message on the {} channel\n", channel);
    }

    // Get-or-create, the lookup-miss path.
    let stats = match registry.get(&Channel::Admin) {
        Ok(logger) => logger,
        Err(VellumError::LoggerNotFound(_)) => registry
            .create(Channel::Admin, "admin", DEBUG, '|')
            .expect("no race in this demo"),
        Err(err) => panic!("unexpected registry error: {err}"),
    };
    vinfo!(stats, "admin channel reused\n");

    // Duplicate creation fails loudly.
    match registry.create(Channel::Local, "local", DEBUG, '|') {
        Err(VellumError::LoggerExists(key)) => {
            vinfo!(stats, "as expected, `{}` was already taken\n", key);
        }
        other => panic!("expected LoggerExists, got {other:?}"),
    }

    registry.remove(&Channel::Global).expect("created above");
    vinfo!(stats, "{} loggers remain\n", registry.len());
}
