pub mod totals_writer;
