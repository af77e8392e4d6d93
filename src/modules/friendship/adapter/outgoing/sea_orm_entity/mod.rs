pub mod friendships;
