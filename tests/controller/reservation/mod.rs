mod create_reservation;
mod list_reservations;
