//! Missing-dependency report and install command.

use crate::detection::Distribution;
use crate::requirements::registry::Dependency;

/// Printable report of missing dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// One line per missing dependency, in audit order.
    pub lines: Vec<String>,
    /// Packages to install, in report order, without duplicates.
    pub packages: Vec<String>,
}

impl Report {
    /// Whether there is nothing to report.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Format missing dependencies for `distribution`.
///
/// A dependency with a package on `distribution` is shown as
/// `"<name> (<probe id>, <distribution>: <package>)"` and its package is
/// collected; otherwise only `"<name> (<probe id>)"` is shown.
pub fn format_report(missing: &[Dependency], distribution: Distribution) -> Report {
    let mut report = Report::default();

    for dep in missing {
        match dep.package_for(distribution) {
            Some(package) => {
                report.lines.push(format!(
                    "{} ({}, {}: {})",
                    dep.display_name, dep.probe_id, distribution, package
                ));
                if !report.packages.iter().any(|p| p == package) {
                    report.packages.push(package.to_string());
                }
            }
            None => {
                report
                    .lines
                    .push(format!("{} ({})", dep.display_name, dep.probe_id));
            }
        }
    }

    report
}

/// Package manager command installing `packages`.
///
/// `None` when the distribution has no known package manager or there is
/// nothing to install.
pub fn build_install_command(distribution: Distribution, packages: &[String]) -> Option<String> {
    let prefix = distribution.install_prefix()?;
    if packages.is_empty() {
        return None;
    }
    Some(format!("{} {}", prefix, packages.join(" ")))
}
