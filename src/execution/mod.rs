pub mod copy_engine;
