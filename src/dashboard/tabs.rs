use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::resource::Resource;

/// The dashboard's tabs, one per listed collection.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tab {
    #[default]
    Suppliers,
    Stores,
    Products,
    Employees,
    Customers,
    Orders,
    Sales,
    Payments,
}

impl Tab {
    pub fn resource(self) -> Resource {
        match self {
            Tab::Suppliers => Resource::Suppliers,
            Tab::Stores => Resource::Stores,
            Tab::Products => Resource::Products,
            Tab::Employees => Resource::Employees,
            Tab::Customers => Resource::Customers,
            Tab::Orders => Resource::Orders,
            Tab::Sales => Resource::Sales,
            Tab::Payments => Resource::Payments,
        }
    }

    /// Columns in the tab's table; tabs whose rows can be deleted count the
    /// action column
    pub fn column_count(self) -> usize {
        match self {
            Tab::Stores | Tab::Orders => 5,
            Tab::Suppliers | Tab::Customers | Tab::Sales => 6,
            Tab::Products => 7,
            Tab::Employees | Tab::Payments => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn every_tab_maps_to_its_resource() {
        for tab in Tab::iter() {
            assert_eq!(tab.to_string(), tab.resource().path());
            assert_eq!(Tab::from_str(tab.as_ref()).unwrap(), tab);
        }
        assert!(Tab::from_str("attendance").is_err());
    }
}
