//! Bound-variable resolution.

use std::collections::BTreeMap;

use crate::host::DesignHost;
use crate::model::VariableBinding;

/// Resolve property bindings to variable names.
///
/// Only the first alias of a list binding is looked up. Bindings whose
/// variable is missing or whose lookup fails are left out; `None` is
/// returned when nothing resolves.
pub fn extract_bound_variables<H: DesignHost>(
    host: &H,
    bindings: Option<&BTreeMap<String, VariableBinding>>,
) -> Option<BTreeMap<String, String>> {
    let resolved: BTreeMap<String, String> = bindings?
        .iter()
        .filter_map(|(property, binding)| {
            let alias = binding.first().filter(|a| !a.id.is_empty())?;
            match host.variable_by_id(&alias.id) {
                Ok(Some(variable)) => Some((property.clone(), variable.name)),
                Ok(None) => None,
                Err(e) => {
                    log::debug!("variable {} for {} unavailable: {}", alias.id, property, e);
                    None
                }
            }
        })
        .collect();

    if resolved.is_empty() {
        None
    } else {
        Some(resolved)
    }
}
