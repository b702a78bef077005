use crate::errors::GraphError;
use crate::graph::Graph;

/// Locations on the example campus
pub const LOCATIONS: [&str; 5] = [
    "Library",
    "Cafeteria",
    "Lecture Hall 1",
    "Lecture Hall 2",
    "Admin Building",
];

/// Walking distances between locations in meters
pub const PATHS: [(&str, &str, u32); 6] = [
    ("Library", "Cafeteria", 200),
    ("Library", "Lecture Hall 1", 300),
    ("Cafeteria", "Lecture Hall 1", 100),
    ("Lecture Hall 1", "Lecture Hall 2", 150),
    ("Admin Building", "Library", 250),
    ("Admin Building", "Lecture Hall 2", 100),
];


/// Build the example campus map
pub fn example_campus() -> Result<Graph<u32>, GraphError> {
    let mut campus = Graph::new();

    for location in LOCATIONS {
        campus.add_location(location);
    }

    for (from, to, meters) in PATHS {
        campus.add_path(from, to, meters)?;
    }

    Ok(campus)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_campus_layout() {
        let campus = example_campus().unwrap();

        assert_eq!(campus.locations().collect::<Vec<_>>(), LOCATIONS.to_vec());
        assert_eq!(campus.path_count(), PATHS.len());
        assert_eq!(
            campus.neighbors("Lecture Hall 1").unwrap(),
            &[
                ("Library".to_string(), 300),
                ("Cafeteria".to_string(), 100),
                ("Lecture Hall 2".to_string(), 150),
            ]
        );
    }
}
