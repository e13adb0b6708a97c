//! Command line overrides for sensitive configuration values.
//!
//! Passwords, secrets and tokens should not have to live in a configuration
//! file, so every configuration type holding one can expose it as a flag on a
//! [`clap::Command`]. Registration only touches the command; values reach the
//! configuration once the command line has been parsed and handed back to
//! [`RegisterFlags::apply_flags`].

use clap::{Arg, ArgAction, ArgMatches, Command};

/// Configuration types that can register overridable fields as flags.
pub trait RegisterFlags {
    /// Adds the flags of this configuration to `command`.
    ///
    /// Flag names must be namespaced so that several configurations can
    /// register on the same command.
    fn register_flags(&self, command: Command) -> Command;

    /// Copies the values of the flags present in `matches` into `self`.
    ///
    /// Fields whose flag was not given on the command line are left untouched.
    fn apply_flags(&mut self, matches: &ArgMatches);
}

/// Builds a string flag, empty unless given on the command line.
pub(crate) fn string_flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("VALUE")
        .help(help)
        .action(ArgAction::Set)
}

/// Overwrites `target` if the flag `name` was given.
///
/// Flags unknown to the command which produced `matches` count as not given.
pub(crate) fn apply_string(matches: &ArgMatches, name: &str, target: &mut String) {
    if let Ok(Some(value)) = matches.try_get_one::<String>(name) {
        if !target.is_empty() && *target != *value {
            log::warn!("flag --{} overrides a value set in the configuration", name);
        }
        target.clone_from(value);
    }
}
