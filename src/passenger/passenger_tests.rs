/*
 * Unit tests for passenger module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_passenger_new_rejects_same_floor
 *  - test_passenger_wait_time_before_pickup
 *  - test_passenger_wait_time_after_pickup
 *  - test_passenger_total_time
 *  - test_passenger_lifecycle_order
 *  - test_passenger_position_waiting
 *  - test_passenger_position_traveling_up
 *  - test_passenger_position_traveling_down
 *  - test_passenger_position_done
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod passenger_tests {
    use crate::passenger::{Passenger, PassengerState};
    use crate::shared::PassengerStatus::{Done, Traveling, Waiting};
    use crate::shared::{ElevatorId, PassengerId, Request, SimError};

    fn passenger(source: u32, target: u32, request_time: u64) -> Passenger {
        Passenger::new(PassengerId::new(1), source, target, request_time).unwrap()
    }

    #[test]
    fn test_passenger_new_rejects_same_floor() {
        // Purpose: A request whose source and target floor match is refused at creation

        // Arrange
        let request = Request { id: 7, source: 4, dest: 4, time: 0 };

        // Act
        let result = Passenger::from_request(&request);

        // Assert
        assert!(matches!(result, Err(SimError::InvalidRequest { .. })));
    }

    #[test]
    fn test_passenger_wait_time_before_pickup() {
        // Purpose: Before pickup the wait time is the capacity wait counter alone

        // Arrange
        let mut p = passenger(2, 5, 3);

        // Act
        p.add_assignation_wait();
        p.add_assignation_wait();

        // Assert
        assert_eq!(p.wait_time(), 2);
        assert_eq!(p.total_time(), None);
        assert_eq!(p.state(), PassengerState::Pending);
    }

    #[test]
    fn test_passenger_wait_time_after_pickup() {
        // Purpose: After pickup the wait is the time since the request, capacity waits included

        // Arrange
        let mut p = passenger(1, 7, 1);
        for _ in 0..4 {
            p.add_assignation_wait();
        }

        // Act
        p.mark_pickup(10).unwrap();

        // Assert
        assert_eq!(p.wait_time(), 10 - 1);
        assert_eq!(p.assignation_wait_time(), 4);
    }

    #[test]
    fn test_passenger_total_time() {
        // Purpose: Total time is only defined once pickup and dropoff are both set

        // Arrange
        let mut p = passenger(1, 3, 0);
        p.assign_to(ElevatorId::new(1));

        // Act + Assert
        p.mark_pickup(0).unwrap();
        assert_eq!(p.total_time(), None);

        p.mark_dropoff(2).unwrap();
        assert_eq!(p.total_time(), Some(2));
        assert_eq!(p.wait_time(), 0);
        assert_eq!(p.state(), PassengerState::Done);
    }

    #[test]
    fn test_passenger_lifecycle_order() {
        // Purpose: Dropoff needs a pickup first and neither may be recorded twice

        // Arrange
        let mut p = passenger(2, 6, 0);

        // Act + Assert
        assert!(matches!(p.mark_dropoff(3), Err(SimError::Lifecycle { .. })));
        assert!(p.mark_pickup(1).is_ok());
        assert!(matches!(p.mark_pickup(2), Err(SimError::Lifecycle { .. })));
        assert!(p.mark_dropoff(5).is_ok());
        assert!(matches!(p.mark_dropoff(6), Err(SimError::Lifecycle { .. })));
        assert_eq!(p.pickup_time(), Some(1));
        assert_eq!(p.dropoff_time(), Some(5));
    }

    #[test]
    fn test_passenger_position_waiting() {
        // Purpose: A passenger that is not picked up waits at the source floor

        // Arrange
        let mut p = passenger(3, 8, 0);
        let pending = p.position(4);
        p.assign_to(ElevatorId::new(2));

        // Act
        let assigned = p.position(4);

        // Assert
        assert_eq!((pending.floor, pending.status, pending.elevator), (3, Waiting, None));
        assert_eq!(
            (assigned.floor, assigned.status, assigned.elevator),
            (3, Waiting, Some(ElevatorId::new(2)))
        );
    }

    #[test]
    fn test_passenger_position_traveling_up() {
        // Purpose: A riding passenger moves one floor per tick since pickup

        // Arrange
        let mut p = passenger(2, 6, 0);
        p.assign_to(ElevatorId::new(1));
        p.mark_pickup(3).unwrap();

        // Act
        let floors: Vec<_> = (3..=7).map(|t| (p.position(t).floor, p.position(t).status)).collect();

        // Assert
        assert_eq!(
            floors,
            vec![(2, Traveling), (3, Traveling), (4, Traveling), (5, Traveling), (6, Done)]
        );
    }

    #[test]
    fn test_passenger_position_traveling_down() {
        // Purpose: Interpolation follows the sign of target - source

        // Arrange
        let mut p = passenger(9, 4, 0);
        p.mark_pickup(0).unwrap();

        // Act
        let position = p.position(2);

        // Assert
        assert_eq!((position.floor, position.status), (7, Traveling));
        assert_eq!(p.position(50).floor, 4);
    }

    #[test]
    fn test_passenger_position_done() {
        // Purpose: A dropped-off passenger is done at the target floor

        // Arrange
        let mut p = passenger(5, 1, 0);
        p.mark_pickup(0).unwrap();
        p.mark_dropoff(1).unwrap();

        // Act
        let position = p.position(1);

        // Assert
        assert_eq!((position.floor, position.status, position.elevator), (1, Done, None));
    }
}
