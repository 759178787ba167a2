mod booking_slots_test;
mod middleware_test;
mod test_utils;
