pub mod d400_forecast;
