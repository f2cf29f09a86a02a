use crate::models::{Expat, FinalStatus, OrderStatus};

/// Example records loaded at startup unless the store starts empty
pub fn example_expats() -> Vec<Expat> {
    let mut john = Expat::new();
    john.name = "John Doe".to_string();
    john.arrival_date = "2024-07-20".to_string();
    john.business_card = OrderStatus::Ordered;
    john.phone = OrderStatus::Ordered;
    john.sim_card = OrderStatus::NotOrdered;
    john.hotel = OrderStatus::Ordered;
    john.driver = "Budi Santoso".to_string();
    john.car = "Toyota Avanza".to_string();
    john.handover_date = "2024-07-22".to_string();
    john.final_status = FinalStatus::InProgress;
    john.notes = "Needs SIM card activation assistance.".to_string();

    let mut jane = Expat::new();
    jane.name = "Jane Smith".to_string();
    jane.arrival_date = "2024-07-15".to_string();
    jane.business_card = OrderStatus::Ordered;
    jane.phone = OrderStatus::Ordered;
    jane.sim_card = OrderStatus::Ordered;
    jane.hotel = OrderStatus::Ordered;
    jane.driver = "Eko Wijoyo".to_string();
    jane.car = "Honda CR-V".to_string();
    jane.handover_date = "2024-07-16".to_string();
    jane.final_status = FinalStatus::Completed;
    jane.notes = "All items delivered successfully.".to_string();

    let mut peter = Expat::new();
    peter.name = "Peter Jones".to_string();
    peter.arrival_date = "2024-08-01".to_string();
    peter.final_status = FinalStatus::Pending;
    peter.notes = "Awaiting arrival to start procurement.".to_string();

    vec![john, jane, peter]
}
