use std::fmt::Write as _;
use std::fs;

use crate::cli::{Cli, RuleAddArgs, RulesAction, RulesArgs};
use crate::config::FileSystem;
use crate::error::RpgGuardError;
use crate::rules::{CompiledRuleSet, CustomRule, CustomRuleStore};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, report_error, resolve_rules_path, write_output};

#[must_use]
pub fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// # Errors
/// Returns an error if the rules file cannot be read, parsed or written, or
/// the action refers to an unknown rule.
pub fn run_rules_impl(args: &RulesArgs, cli: &Cli) -> Result<()> {
    let config = load_config(None, cli.no_config)?;
    let path = resolve_rules_path(args.file.as_deref(), &config);
    let mut store = CustomRuleStore::open(path)?;

    let output = execute_rules_action(&mut store, &args.action)?;
    let is_listing = matches!(
        args.action,
        RulesAction::List | RulesAction::Show { .. } | RulesAction::Export { output: None }
    );
    // Listings are the command's result; confirmations are status output.
    write_output(None, &output, cli.quiet && !is_listing)
}

/// Apply `action` to `store` and return the text to print.
///
/// # Errors
/// Returns an error if the action refers to an unknown rule, adds a
/// duplicate or invalid rule, or the rules file cannot be written.
pub fn execute_rules_action<F: FileSystem>(
    store: &mut CustomRuleStore<F>,
    action: &RulesAction,
) -> Result<String> {
    match action {
        RulesAction::List => Ok(format_rule_list(store.rules())),
        RulesAction::Show { id } => {
            let rule = store
                .get(id)
                .ok_or_else(|| RpgGuardError::RuleNotFound(id.clone()))?;
            Ok(format!("{}\n", serde_json::to_string_pretty(rule)?))
        }
        RulesAction::Add(add) => {
            let rule = rule_from_args(add)?;
            let id = rule.id.clone();
            store.add(rule)?;
            Ok(format!("Added rule '{id}' to {}\n", store.path().display()))
        }
        RulesAction::Remove { id } => {
            store.remove(id)?;
            Ok(format!("Removed rule '{id}'\n"))
        }
        RulesAction::Enable { id } => {
            store.enable(id)?;
            Ok(format!("Enabled rule '{id}'\n"))
        }
        RulesAction::Disable { id } => {
            store.disable(id)?;
            Ok(format!("Disabled rule '{id}'\n"))
        }
        RulesAction::Export { output } => {
            let json = format!("{}\n", store.export()?);
            match output {
                Some(path) => {
                    write_output(Some(path.as_path()), &json, false)?;
                    Ok(format!("Exported {} rules to {}\n", store.rules().len(), path.display()))
                }
                None => Ok(json),
            }
        }
        RulesAction::Import { source, merge } => {
            let json = fs::read_to_string(source).map_err(|e| RpgGuardError::FileRead {
                path: source.clone(),
                source: e,
            })?;
            let count = store.import(&json, *merge)?;
            let mode = if *merge { "Merged" } else { "Imported" };
            Ok(format!("{mode} {count} rules into {}\n", store.path().display()))
        }
        RulesAction::Reset => {
            store.reset()?;
            Ok("Removed all custom rules\n".to_string())
        }
    }
}

/// Build a rule from `rules add` arguments, rejecting patterns that do not
/// compile.
fn rule_from_args(args: &RuleAddArgs) -> Result<CustomRule> {
    let rule = CustomRule {
        id: args.id.clone(),
        name: args.name.clone().unwrap_or_else(|| args.id.clone()),
        description: args.description.clone().unwrap_or_default(),
        category: args.category,
        severity: args.severity,
        enabled: !args.disabled,
        pattern: args.pattern.clone(),
        message: args.message.clone(),
        suggestion: args.suggestion.clone(),
    };
    // Compile a copy that is forced on so disabled rules are validated too.
    let probe = CustomRule {
        enabled: true,
        ..rule.clone()
    };
    let (_, mut diagnostics) = CompiledRuleSet::compile([&probe]);
    match diagnostics.pop() {
        Some(error) => Err(error),
        None => Ok(rule),
    }
}

fn format_rule_list(rules: &[CustomRule]) -> String {
    if rules.is_empty() {
        return "No custom rules defined.\n".to_string();
    }
    let mut output = String::new();
    for rule in rules {
        let status = if rule.enabled { "enabled" } else { "disabled" };
        writeln!(
            output,
            "{:<24} {status:<8} {:<7} {:<13} {}",
            rule.id,
            rule.severity.as_str(),
            rule.category.as_str(),
            rule.name
        )
        .ok();
        if let Some(ref pattern) = rule.pattern {
            writeln!(output, "    pattern: {pattern}").ok();
        }
    }
    let enabled = rules.iter().filter(|rule| rule.enabled).count();
    writeln!(output, "\n{} rules ({enabled} enabled)", rules.len()).ok();
    output
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
