/*
 * Unit tests for configuration loading
 *
 * Tests:
 *  - test_config_parse_full
 *  - test_config_parse_partial_uses_defaults
 *  - test_config_rejects_zero_capacity
 *  - test_config_missing_file_uses_defaults
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use crate::config::{load_config, parse_config, Config, SimulationConfig};
    use crate::shared::SimError;

    #[test]
    fn test_config_parse_full() {
        // Purpose: Every key in both tables is read

        // Arrange
        let input = r#"
            [simulation]
            n_elevators = 3
            n_floors = 20
            capacity = 5

            [io]
            input_file = "long_sample.json"
            output_file = "out.log"
        "#;

        // Act
        let config = parse_config(input).unwrap();

        // Assert
        assert_eq!(
            config.simulation,
            SimulationConfig { n_elevators: 3, n_floors: 20, capacity: 5 }
        );
        assert_eq!(config.io.input_file, "long_sample.json");
        assert_eq!(config.io.output_file, "out.log");
    }

    #[test]
    fn test_config_parse_partial_uses_defaults() {
        // Purpose: Missing tables and keys fall back to the defaults

        // Arrange
        let input = "[simulation]\nn_elevators = 2\n";

        // Act
        let config = parse_config(input).unwrap();

        // Assert
        assert_eq!(config.simulation.n_elevators, 2);
        assert_eq!(config.simulation.n_floors, 10);
        assert_eq!(config.simulation.capacity, 2);
        assert_eq!(config.io, Config::default().io);
    }

    #[test]
    fn test_config_rejects_zero_capacity() {
        // Purpose: A configuration that cannot build a system is refused

        // Act
        let result = parse_config("[simulation]\ncapacity = 0\n");

        // Assert
        assert!(matches!(result, Err(SimError::InvalidSystem(_))));
        assert!(matches!(parse_config("[simulation]\nn_floors = \"ten\"\n"), Err(SimError::Toml(_))));
    }

    #[test]
    fn test_config_missing_file_uses_defaults() {
        // Purpose: Running without a configuration file is allowed

        // Arrange
        let path = std::env::temp_dir().join("elevator_sim_no_such_config.toml");

        // Act
        let config = load_config(&path).unwrap();

        // Assert
        assert_eq!(config, Config::default());
    }
}
