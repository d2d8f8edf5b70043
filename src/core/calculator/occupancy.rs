/// Share of the facility capacity in use, as a whole percentage
/// (half-up rounded). A zero capacity reports 0; overcrowding reports
/// values above 100 unchanged.
pub fn occupancy_percentage(occupancy: usize, capacity: u32) -> i64 {
    if capacity == 0 {
        return 0;
    }
    let occupancy = occupancy as i64;
    let capacity = capacity as i64;

    (200 * occupancy + capacity) / (2 * capacity)
}
