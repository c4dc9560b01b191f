/// the parts of a search state that rental restrictions depend on.
pub trait RentalStatus {
    /// true while a rented vehicle is in use
    fn is_renting_vehicle(&self) -> bool;
    /// the network of the rented vehicle, if known
    fn rental_network(&self) -> Option<&str>;
}
