use std::fmt;

/// A single dish on a menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    name: String,
    description: String,
    vegetarian: bool,
    price: f64,
}

impl MenuItem {
    pub fn new<S, D>(name: S, description: D, vegetarian: bool, price: f64) -> Self
    where
        S: Into<String>,
        D: Into<String>,
    {
        MenuItem {
            name: name.into(),
            description: description.into(),
            vegetarian,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn is_vegetarian(&self) -> bool {
        self.vegetarian
    }
}

/// Formats the item the way the waitress reads it out: `name, price -- description`
impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {} -- {}", self.name, self.price, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn display_uses_shortest_price() {
        let item = MenuItem::new("Waffles", "Plain waffles", true, 3.5);
        assert_eq!(item.to_string(), "Waffles, 3.5 -- Plain waffles");

        let item = MenuItem::new("Hotdog", "A hot dog", false, 3.05);
        assert_eq!(item.to_string(), "Hotdog, 3.05 -- A hot dog");
    }

    #[test]
    fn serializes_fields_by_name() {
        let item = MenuItem::new("BLT", "Bacon with lettuce & tomato", false, 2.99);
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "BLT",
                "description": "Bacon with lettuce & tomato",
                "vegetarian": false,
                "price": 2.99,
            })
        );

        let back: MenuItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }
}
