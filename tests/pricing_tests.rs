use rand::Rng;
use rental_agency::domain::vehicle::{CARGO_DAILY_FACTOR, NAVIGATION_DAILY_FEE, Vehicle};
use rust_decimal::Decimal;

fn random_rate(rng: &mut impl Rng) -> Decimal {
    // Two decimal places, up to 500.00 per day
    Decimal::new(rng.gen_range(0..50_000), 2)
}

#[test]
fn test_costs_are_linear_and_non_decreasing() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let rate = random_rate(&mut rng);
        let capacity = Decimal::from(rng.gen_range(0..5_000u32));
        let vehicles = [
            Vehicle::car("V1", "Car", rate, rng.gen_bool(0.5)),
            Vehicle::motorcycle("V2", "Bike", rate),
            Vehicle::truck("V3", "Truck", rate, capacity),
        ];

        for vehicle in &vehicles {
            let one_day = vehicle.compute_rental_cost(1).unwrap();
            let mut previous = vehicle.compute_rental_cost(0).unwrap();
            assert_eq!(previous, Decimal::ZERO);
            for days in 1..=30u32 {
                let cost = vehicle.compute_rental_cost(days).unwrap();
                assert!(cost >= previous);
                assert_eq!(cost, one_day * Decimal::from(days));
                previous = cost;
            }
        }
    }
}

#[test]
fn test_car_surcharge_over_motorcycle() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let rate = random_rate(&mut rng);
        let days = rng.gen_range(1..365u32);
        let bike = Vehicle::motorcycle("V2", "Bike", rate).compute_rental_cost(days).unwrap();
        let with_nav = Vehicle::car("V1", "Car", rate, true).compute_rental_cost(days).unwrap();
        let without_nav = Vehicle::car("V1", "Car", rate, false).compute_rental_cost(days).unwrap();

        assert_eq!(with_nav, bike + NAVIGATION_DAILY_FEE * Decimal::from(days));
        assert_eq!(without_nav, bike);
    }
}

#[test]
fn test_truck_cargo_surcharge() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let rate = random_rate(&mut rng);
        let capacity = Decimal::new(rng.gen_range(0..100_000), 1);
        let days = rng.gen_range(1..365u32);

        let base = Vehicle::motorcycle("V2", "Bike", rate).compute_rental_cost(days).unwrap();
        let truck = Vehicle::truck("V3", "Truck", rate, capacity).compute_rental_cost(days).unwrap();

        assert_eq!(
            truck - base,
            capacity * CARGO_DAILY_FACTOR * Decimal::from(days)
        );
    }
}
