pub mod u501_import_inventory_csv;
pub mod u502_run_forecast;
