quantity!(SquareMetres, "m²");
