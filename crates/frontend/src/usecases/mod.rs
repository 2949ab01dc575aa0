pub mod u501_import_inventory_csv;
