mod players_sea;
