mod detail;
mod query;
mod repository;
mod save;

pub use detail::*;
pub use query::*;
pub use repository::*;
pub use save::*;

use crate::models::{self, component_resource_type};
use crate::services::AccessResolver;
use crate::views;
use std::collections::HashMap;

/// Catalog projection for one reader. Access is resolved once per resource type.
pub(crate) async fn listing(
    resolver: &AccessResolver,
    user_id: Option<&str>,
    components: Vec<models::Component>,
) -> Vec<views::component::Listed> {
    let mut granted: HashMap<String, bool> = HashMap::new();
    let mut list = Vec::with_capacity(components.len());

    for component in components {
        let code_visible = if component.is_premium {
            let resource_type = component_resource_type(&component.language_type);
            match granted.get(&resource_type) {
                Some(allowed) => *allowed,
                None => {
                    let allowed = resolver.check_access(user_id, &resource_type).await;
                    granted.insert(resource_type, allowed);
                    allowed
                }
            }
        } else {
            true
        };
        list.push(views::component::Listed::new(component, code_visible));
    }

    list
}
