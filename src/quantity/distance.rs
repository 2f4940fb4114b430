quantity!(Kilometres, "km");
