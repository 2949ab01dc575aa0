pub mod p900_reorder_recommendations;
