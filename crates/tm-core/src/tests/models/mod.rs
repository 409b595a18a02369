mod order;
mod order_state;
