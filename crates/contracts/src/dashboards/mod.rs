pub mod d001_revenue;
